pub mod chart_use_case;
pub mod ports;
