// Services layer for business logic
// Services sit between the HTTP routes and storage; they are the insertion
// point for validation, authorization or auditing that spans transports.

pub mod event;

pub use event::EventService;
