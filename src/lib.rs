pub mod collate;
pub mod keys;
pub mod labeler;
pub mod locale;
pub mod namedex;
pub mod profile;
pub mod reading;
pub mod script;

pub use collate::{CollateError, Collation};
pub use keys::{NameStyle, DEFAULT_ROMANIZATION_CAP};
pub use locale::LocaleFamily;
pub use namedex::{Namedex, NamedexBuilder, NamedexError};
pub use profile::{Bucket, BucketKind, LocaleProfile};
