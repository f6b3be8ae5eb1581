pub mod bsf_packer;
pub mod fit_rule;
pub mod search;
