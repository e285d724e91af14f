//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - type_name_for_code() - 根据错误代码反查类型名称
/// - 便捷构造函数
macro_rules! define_grader_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GraderError {
            $($variant(String),)*
        }

        impl GraderError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GraderError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GraderError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GraderError::$variant(msg) => msg,)*
                }
            }

            /// 根据错误代码反查类型名称
            pub fn type_name_for_code(code: &str) -> Option<&'static str> {
                match code {
                    $($code => Some($type_name),)*
                    _ => None,
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GraderError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GraderError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_grader_errors! {
    Validation("E001", "Validation Error"),
    DuplicateName("E002", "Duplicate Name"),
    Configuration("E003", "Configuration Error"),
    RecordNotFound("E004", "Record Not Found"),
    Export("E005", "Export Error"),
    FileOperation("E006", "File Operation Error"),
    Serialization("E007", "Serialization Error"),
    StoragePluginNotFound("E008", "Storage Plugin Not Found"),
    AppConfig("E009", "Application Config Error"),
}

impl GraderError {
    /// 是否为提交被拒绝（由用户输入引起，而非系统故障）
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GraderError::Validation(_)
                | GraderError::DuplicateName(_)
                | GraderError::Configuration(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GraderError {}

impl From<std::io::Error> for GraderError {
    fn from(err: std::io::Error) -> Self {
        GraderError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GraderError {
    fn from(err: serde_json::Error) -> Self {
        GraderError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GraderError {
    fn from(err: config::ConfigError) -> Self {
        GraderError::AppConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;
