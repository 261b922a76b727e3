pub mod admin;
pub use admin::{Admin, AdminPool};

pub mod builder;
pub use builder::{BuildContext, DatagridBuilder, FormContractor, ListBuilder, ShowBuilder};

pub mod datagrid;
pub use datagrid::{Datagrid, Filter, Pager};

pub mod form;
pub use form::{FormView, Widget};

pub mod templates;
pub use templates::TemplateMap;

pub use scaffold_core::describe::{Context, FieldDescription, FieldOptions, FieldRequest};
pub use scaffold_core::{AdminId, Error, FieldType, Instance, Result, Value};
