#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fv_cfg as cfg;
pub use fv_expose as expose;
pub use fv_utils as utils;
