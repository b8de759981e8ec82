//! # jyn-core
//!
//! Core types and the progression state machine for jyn.
//!
//! This crate provides the foundational types shared across all jyn crates:
//! - Entity structs for worksheets, sentences and turnarounds
//! - Status, stage and inquiry-step enums with transition tables
//! - The completion calculator and stage resolver
//! - Inquiry sequencing, form steps, sentence selection
//! - Dashboard filtering and progress summaries
//! - CLI response types
//! - ID prefix constants and generation
//! - Cross-cutting error types

pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod form;
pub mod ids;
pub mod navigation;
pub mod progress;
pub mod responses;
pub mod selection;
pub mod sequencer;
