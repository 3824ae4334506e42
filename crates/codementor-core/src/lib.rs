//! Business logic for codementor.
//!
//! Two cooperating pieces: model resolution (which remote model serves
//! every request) and the completion relay (one user message in, one
//! assistant reply out, reflected in the session transcript). Provider
//! implementations live in codementor-infra behind the
//! [`llm::provider::GenerativeProvider`] trait.

pub mod chat;
pub mod llm;
