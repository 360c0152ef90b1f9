//! 邮件模板系统

use folio_errors::{AppError, AppResult};
use tera::Tera;
use tracing::debug;

/// 邮件模板管理器
///
/// 名称以 `.html` 结尾的模板会对插值自动做 HTML 转义，`.txt` 模板原样输出。
pub struct EmailTemplate {
    tera: Tera,
}

impl EmailTemplate {
    /// 从内存中的模板字符串创建
    pub fn from_strings<I, N, C>(templates: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();

        for (name, content) in templates {
            let name = name.as_ref();
            tera.add_raw_template(name, content.as_ref()).map_err(|e| {
                AppError::internal(format!("Failed to add template {}: {}", name, e))
            })?;
            debug!(template = %name, "Email template registered");
        }

        Ok(Self { tera })
    }

    /// 渲染模板
    pub fn render(&self, template_name: &str, context: &serde_json::Value) -> AppResult<String> {
        let context = tera::Context::from_serialize(context)
            .map_err(|e| AppError::internal(format!("Failed to create template context: {}", e)))?;

        self.tera.render(template_name, &context).map_err(|e| {
            AppError::internal(format!(
                "Failed to render template {}: {}",
                template_name, e
            ))
        })
    }
}
