mod entity;
pub use entity::Entity;

mod filter;
pub use filter::Filter;

mod path;
pub use path::Path;

mod value;
pub use value::Value;

mod view;
pub use view::View;
