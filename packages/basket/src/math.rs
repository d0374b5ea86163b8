pub mod allocation;
pub mod ceil_div;
pub mod fixed_point;
pub mod oracle;
pub mod safe_math;
pub mod shares;
