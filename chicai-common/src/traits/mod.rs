pub mod device_traits;
pub mod service_traits;

pub use device_traits::{CameraDevice, Facing, Frame, Geolocator, VideoStream};
pub use service_traits::{RecommendationGenerator, TryOnGenerator, WeatherLookup};
