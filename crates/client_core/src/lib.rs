pub mod controller;
pub mod error;
pub mod service;
pub mod view;

pub use controller::UiController;
pub use error::{ClientError, ClientErrorKind};
pub use service::{TaskClient, TaskService, DEFAULT_SERVER_URL};
pub use view::{Document, ElementId, TaskBlock, View, HIDDEN_CLASS};

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod service_tests;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;
