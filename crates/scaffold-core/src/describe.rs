mod description;
pub use description::FieldDescription;

mod options;
pub use options::{EditMode, FieldOptions};

mod registry;
pub use registry::{Context, FieldDescriptionCollection, FieldDescriptionRegistry};

mod request;
pub use request::FieldRequest;
