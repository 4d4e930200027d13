/// Router Module Index
///
/// Groups the page shell by audience. All three groups sit behind the same access
/// gate middleware; the split documents who each page is for and keeps the admin
/// section table in one place.

/// Pages open to anonymous visitors. Auth pages bounce signed-in callers.
pub mod public;

/// Pages that need a session credential but no particular role.
pub mod authenticated;

/// Back-office pages, gated by role.
pub mod admin;

/// JSON endpoints outside the gate.
pub mod api;
