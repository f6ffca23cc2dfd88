/// Data layer: loading, decoding, filtering and aggregation.
///
/// Architecture:
/// ```text
///   all_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  parse dates, decode category codes → RentalTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive date range → Vec<&Rental>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  daily / hourly / scatter / seasonal views
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod labels;
pub mod loader;
pub mod model;
pub mod normalize;
