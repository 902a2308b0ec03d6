pub mod application;
pub mod appointment;
pub mod availability;
pub mod resume;
pub mod user;

pub use application::{Application, ApplicationCreate, ApplicationHistory, ApplicationUpdate};
pub use appointment::{Appointment, AppointmentCreate, AppointmentStatus};
pub use availability::{AvailabilityCreate, AvailabilitySlot};
pub use resume::{
    Resume, ResumeCreate, ResumeReview, ResumeStatus, ReviewComment, ReviewCommentCreate,
    ReviewCreate, ReviewStatus,
};
pub use user::{
    AccountCreate, AccountSummary, ClientInfo, ClientProfile, ClientProfileUpdate, CoachInfo,
    CoachProfile, CoachProfileUpdate,
};
