//! Cross-format properties and end-to-end flows.

mod mentions;
mod migration;
mod properties;
mod scenarios;
