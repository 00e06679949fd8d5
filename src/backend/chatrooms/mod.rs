//! Chatrooms
//!
//! Rooms, their participant list and their message log.
//!
//! # Sequence Operations
//!
//! Joining, leaving and posting never rewrite the whole room. Each maps to
//! one atomic operation of [`ChatroomRepository`], so concurrent requests on
//! the same room cannot drop each other's changes.
//!
//! - Join appends the user as `participant` unless they are already in the
//!   room, in which case the room is returned unchanged.
//! - Leave removes every entry with the user id. Leaving a room the user is
//!   not in is a successful no-op.
//! - Post appends a message stamped with the server time.
//!
//! [`ChatroomRepository`]: crate::backend::persistence::ChatroomRepository

pub mod handlers;
pub mod types;

pub use handlers::{
    add_message, add_participant, create_chatroom, delete_chatroom, get_chatroom,
    leave_chatroom, list_chatrooms, update_chatroom,
};
