pub mod announcements;
pub mod calendar;
pub mod faq;
pub mod gallery;
pub mod news;
pub mod news_detail;
pub mod our_team;
pub mod teachers;

pub use announcements::Announcements;
pub use calendar::Calendar;
pub use faq::Faq;
pub use gallery::Gallery;
pub use news::News;
pub use news_detail::NewsDetail;
pub use our_team::OurTeam;
pub use teachers::Teachers;
