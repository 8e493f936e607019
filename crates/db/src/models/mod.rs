//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity is patchable
//!
//! Wire names are camelCase; enum columns map to PostgreSQL enum types and
//! serialize to the exact closed sets the API contract fixes. DTO enum
//! fields stay `String` so a bad value is a field-level validation error
//! rather than a body-level deserialization failure.

pub mod book;
pub mod project;
pub mod project_details;
pub mod project_progress;
