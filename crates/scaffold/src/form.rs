mod factory;
pub use factory::{FieldFactory, MappingFieldFactory};

mod transformer;
pub use transformer::ModelToIdTransformer;

mod view;
pub use view::{FormField, FormView};

mod widget;
pub use widget::{Widget, WidgetCtor, WidgetRegistry};
