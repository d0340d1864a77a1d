mod key_path;
mod node;
mod value;

pub use key_path::KeyPath;
pub use node::LocaleNode;
pub use value::Value;
