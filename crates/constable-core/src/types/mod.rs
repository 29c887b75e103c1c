pub mod collections;
pub mod correction;
pub mod node_kind;
pub mod offence;
