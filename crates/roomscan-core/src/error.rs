//! 输入校验错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("non-finite {field} in {collection}[{index}]")]
    NonFinite {
        collection: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("negative dimensions in {collection}[{index}]")]
    NegativeDimensions {
        collection: &'static str,
        index: usize,
    },
}
