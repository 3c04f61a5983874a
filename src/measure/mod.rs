pub mod estimate;
pub mod measurements;
pub mod proportions;
pub mod report;
pub mod scale;

#[cfg(test)]
pub(crate) mod test_support;

pub use estimate::{
    estimate_head_size_pixels, estimate_hip_width, estimate_lower_body_length,
    estimate_mean_lower_body_length, estimate_shoulder_width, estimate_total_height,
    estimate_upper_body_length, estimate_waist_position, estimate_waist_width, Point2, Side,
};
pub use measurements::{extract_landmark_measurements, LandmarkMeasurements};
pub use proportions::{calculate_body_proportions, BodyProportions};
pub use report::{measure_body, BodyReport, KnownScale};
pub use scale::{
    calculate_pixel_to_cm_ratio, convert_measurements_to_cm, CmMeasurements, ScaleReference,
};
