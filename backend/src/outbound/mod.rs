//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business
//! logic. The only live infrastructure concern today is the hosted
//! collaborator directory under [`directory`].

pub mod directory;
