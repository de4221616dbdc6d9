//! Types and rendering logic shared between the `backend` API and the `frontend` client.

pub mod model;
pub mod render;
pub mod requests;
