use super::ReadContext;
use super::scanner::Scanner;
use crate::base::constants::{HEADER, MAX_MINOR, SUPPORTED_MAJOR};
use crate::error::{GeometryError, Result};
use crate::model::FormatVersion;

/// Read `# Domain Description <major>.<minor>` and select the grammar variant.
pub(super) fn parse_header(scanner: &mut Scanner<'_>, ctx: &ReadContext<'_>) -> Result<FormatVersion> {
    let wrong_format = |message: String| GeometryError::FormatVersion {
        path: ctx.path.to_path_buf(),
        message,
    };

    scanner
        .expect(HEADER)
        .map_err(|e| wrong_format(format!("missing header: {}", e.message())))?;
    let major = scanner
        .unsigned()
        .map_err(|e| wrong_format(format!("missing major version: {}", e.message())))?;
    scanner
        .expect(".")
        .map_err(|e| wrong_format(format!("missing version separator: {}", e.message())))?;
    let minor = scanner
        .unsigned()
        .map_err(|e| wrong_format(format!("missing minor version: {}", e.message())))?;

    if major != SUPPORTED_MAJOR || minor > MAX_MINOR {
        return Err(wrong_format(format!(
            "domain description version {major}.{minor} is not available"
        )));
    }

    let version = if minor == 0 {
        FormatVersion::Legacy
    } else {
        FormatVersion::Current
    };
    tracing::debug!("domain description version {}", version);
    Ok(version)
}
