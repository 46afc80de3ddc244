//! Domain section.
//!
//! ```text
//! Domains <N>
//! Domain <name>: [+-]<interface> ... [shared]
//! ```
//!
//! In a domain, `-` selects the inside of an interface and `+` (the default)
//! its outside. The legacy format writes the name without the colon.

use smol_str::SmolStr;

use super::scanner::Scanner;
use super::{ReadContext, Sign, split_sign};
use crate::base::constants::{KW_DOMAIN, KW_DOMAINS, KW_SHARED, NAME_DELIMITER};
use crate::error::{GeometryError, Result, Section};
use crate::model::{Domain, GeometryBuilder, HalfSpace, Notice};
use crate::topology::ClosureTracker;

/// Read the domain section, checking closure of each referenced interface.
pub(super) fn parse_domains(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    builder: &mut GeometryBuilder,
    closure: &mut ClosureTracker,
) -> Result<()> {
    scanner.skip_comments();
    scanner
        .expect(KW_DOMAINS)
        .map_err(|e| ctx.malformed(Section::Domains, e))?;
    let count = scanner
        .unsigned()
        .map_err(|e| ctx.malformed(Section::Domains, e))?;
    // Anything else on the count line is ignored.
    scanner.rest_of_line();

    let legacy = builder.version.is_legacy();
    for _ in 0..count {
        scanner.skip_comments();
        scanner
            .expect(KW_DOMAIN)
            .map_err(|e| ctx.malformed(Section::Domains, e))?;
        let name = if legacy {
            scanner.word()
        } else {
            scanner.name(NAME_DELIMITER)
        }
        .map_err(|e| ctx.malformed(Section::Domains, e))?;

        let mut domain = Domain::new(SmolStr::new(name));
        for id in scanner.rest_of_line().split_whitespace() {
            let (sign, interface_name) = split_sign(id);
            if sign == Sign::Implicit && id == KW_SHARED {
                let message = format!(
                    "keyword \"{KW_SHARED}\" in domain \"{}\" is deprecated and ignored; please consider updating {} to format 1.1",
                    domain.name,
                    ctx.path.display()
                );
                tracing::warn!("{}", message);
                builder.notice(Notice::warning(message));
                break;
            }

            let interface = builder.find_interface(interface_name).ok_or_else(|| {
                GeometryError::UnknownInterfaceReference {
                    path: ctx.path.to_path_buf(),
                    domain: domain.name.to_string(),
                    interface: interface_name.to_string(),
                }
            })?;
            closure.ensure_closed(builder, interface)?;

            // '-' selects the inside.
            domain
                .half_spaces
                .push(HalfSpace::new(interface, sign == Sign::Minus));
            tracing::trace!("domain \"{}\" bounded by \"{}\"", domain.name, interface_name);
        }
        builder.add_domain(domain)?;
    }
    tracing::debug!("read {} domains", count);
    Ok(())
}
