use crate::errors::Result;
use crate::mailer::Mailer;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedMailerFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Mailer>>> + Send>>;
pub type MailerConstructor = Arc<dyn Fn() -> BoxedMailerFuture + Send + Sync>;

static MAILER_REGISTRY: Lazy<RwLock<HashMap<String, MailerConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_mailer_plugin<S: Into<String>>(name: S, constructor: MailerConstructor) {
    let name = name.into();
    match MAILER_REGISTRY.write() {
        Ok(mut registry) => {
            registry.insert(name, constructor);
        }
        Err(poisoned) => {
            poisoned.into_inner().insert(name, constructor);
        }
    }
}

pub fn get_mailer_plugin(name: &str) -> Option<MailerConstructor> {
    match MAILER_REGISTRY.read() {
        Ok(registry) => registry.get(name).cloned(),
        Err(poisoned) => poisoned.into_inner().get(name).cloned(),
    }
}

pub fn debug_mailer_registry() {
    let Ok(registry) = MAILER_REGISTRY.read() else {
        tracing::debug!("Mailer registry lock poisoned.");
        return;
    };
    if registry.is_empty() {
        tracing::debug!("No mailer plugins registered.");
    } else {
        tracing::debug!("Registered mailer plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

/// 声明邮件后端插件，程序启动时自动注册到全局表
///
/// 类型需提供 `fn new() -> crate::errors::Result<Self>`。
#[macro_export]
macro_rules! declare_mailer_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_mailer_plugin() {
            $crate::mailer::register::register_mailer_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        <$ty>::new()
                            .map(|m| Box::new(m) as Box<dyn $crate::mailer::Mailer>)
                    })
                }),
            );
        }
    };
}
