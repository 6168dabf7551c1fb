//! Default value functions for serde deserialization.

pub fn gt_file() -> String {
    "traj_gt.csv".to_string()
}

pub fn es_file() -> String {
    "traj_es.csv".to_string()
}

pub fn matches_file() -> String {
    "traj_matches.csv".to_string()
}

pub fn max_difference_secs() -> f64 {
    0.02
}
