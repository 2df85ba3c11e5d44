//! Polyline simplification.
//!
//! - [`ramer_douglas_peucker`] — keeps the points that deviate more than a
//!   distance `eps` from the simplified line; non-finite points split the
//!   polyline into independent runs
//! - [`visvalingam_whyatt`] — repeatedly drops the point spanning the
//!   smallest triangle with its neighbours until a target count remains
//!
//! Both keep the first and last point and return the kept points in their
//! original order.
//!
//! # Example
//!
//! ```
//! use geonum::simplify::{ramer_douglas_peucker, visvalingam_whyatt};
//!
//! let line: Vec<[f64; 2]> = (0..10).map(|i| [i as f64, 0.01 * (i % 2) as f64]).collect();
//! assert_eq!(ramer_douglas_peucker(&line, 0.1), vec![[0.0, 0.0], [9.0, 0.01]]);
//! assert_eq!(visvalingam_whyatt(&line, 3).len(), 5);
//! ```

mod rdp;
mod visvalingam;


pub use rdp::ramer_douglas_peucker;
pub use visvalingam::visvalingam_whyatt;
