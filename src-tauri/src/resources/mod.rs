//! Thin command wrappers over the per-resource REST endpoints.
//!
//! Booking has its own module; everything else (profiles, rosters, job
//! applications, resumes, admin accounts) lives here. Wrappers stay thin:
//! typed payloads in, typed responses out, cache invalidation after writes.

pub mod admin;
pub mod applications;
pub mod clients;
pub mod coaches;
pub mod resumes;
