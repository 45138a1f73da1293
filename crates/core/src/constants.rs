/// Constants used throughout the polycache codebase
// Wire format
pub const DEFAULT_DISCRIMINATOR: &str = "@class";
pub const ARRAY_START: u8 = b'[';
pub const OBJECT_START: u8 = b'{';

// Number of elements in a wrapper array: `[containerTypeName, elements]`
pub const WRAPPER_ARRAY_LEN: usize = 2;

// Environment variable names
pub const POLYCACHE_DISCRIMINATOR_VAR: &str = "POLYCACHE_DISCRIMINATOR";
pub const POLYCACHE_WRAPPER_ARRAYS_VAR: &str = "POLYCACHE_WRAPPER_ARRAYS";
pub const POLYCACHE_KEY_PREFIX_VAR: &str = "POLYCACHE_KEY_PREFIX";
pub const POLYCACHE_DEFAULT_TTL_VAR: &str = "POLYCACHE_DEFAULT_TTL_SECS";
pub const POLYCACHE_MISS_ON_CORRUPT_VAR: &str = "POLYCACHE_MISS_ON_CORRUPT";
