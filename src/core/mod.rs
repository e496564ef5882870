pub mod bootstrap;
pub mod serializer;
pub mod tracker;
