//! Literals of the domain description format.

/// Header literal preceding the `major.minor` version.
pub const HEADER: &str = "# Domain Description ";

/// Only major version understood by the reader.
pub const SUPPORTED_MAJOR: u32 = 1;

/// Highest minor version understood by the reader.
pub const MAX_MINOR: u32 = 1;

/// Default comment marker; lines starting with it are skipped wherever a keyword is expected.
pub const COMMENT_MARKER: char = '#';

/// Quote character around file names (optional).
pub const QUOTE: char = '"';

/// Separates a name from what follows it.
pub const NAME_DELIMITER: char = ':';

// Section keywords
pub const KW_MESH_FILE: &str = "MeshFile";
pub const KW_MESHES: &str = "Meshes";
pub const KW_MESH: &str = "Mesh";
pub const KW_INTERFACES: &str = "Interfaces";
pub const KW_INTERFACE: &str = "Interface";
pub const KW_INTERFACE_UNNAMED: &str = "Interface:";
pub const KW_DOMAINS: &str = "Domains";
pub const KW_DOMAIN: &str = "Domain";

/// Deprecated keyword accepted in a domain's id list; ends the list.
pub const KW_SHARED: &str = "shared";

/// Extension of the ASCII triangulation format read by `TriMeshLoader`.
pub const TRI_EXTENSION: &str = "tri";

/// Upper bound on entries preallocated from a count read out of a file.
pub const PREALLOCATION_LIMIT: usize = 1 << 16;
