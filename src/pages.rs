//! Reactive form state, widgets and views
//!
//! ## Example
//!
//! ```
//! use formkit::pages::form::{Cascade, FormValue};
//! use formkit::pages::{Catalog, Signal};
//!
//! let country = Signal::new(FormValue::text("uae"));
//! let city = Signal::new(FormValue::text(""));
//! let _cascade = Cascade::country_city(Catalog, &country, &city);
//! assert_eq!(city.get(), FormValue::text("gada"));
//! ```

pub use formkit_pages::*;
