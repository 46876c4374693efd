//! Best-effort caption generation for gallery images.
//!
//! Wraps a hosted multimodal generation API (Gemini-style
//! `generateContent` REST shape) behind [`client::CaptionClient`].
//! Captioning is a convenience, not a requirement: every public
//! operation is total and resolves to a documented fallback caption
//! instead of raising, so the save path can never be blocked or broken
//! by the enrichment service.

pub mod client;

pub use client::{CaptionClient, CaptionConfig};
