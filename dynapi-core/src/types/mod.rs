mod components;
mod document;
mod info;
mod operation;
mod parameter;
mod schema;

pub use components::Components;
pub use document::{PathItem, Server, SpecDocument};
pub use info::Info;
pub use operation::{MediaType, Operation, Response};
pub use parameter::{Parameter, ParameterLocation};
pub use schema::{InputKind, Schema, SchemaType};
