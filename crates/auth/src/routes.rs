use std::borrow::Cow;

use crate::scope::Scope;

/// Static mapping from required scope to the login destination a denied
/// visitor is redirected to.
///
/// This is configuration, not logic: the field-collection module has its own
/// login screen, every other scope shares the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRoutes {
    pub default_login: Cow<'static, str>,
    pub campo_login: Cow<'static, str>,
}

impl LoginRoutes {
    pub fn path_for(&self, scope: &Scope) -> &str {
        if *scope == Scope::CAMPO {
            &self.campo_login
        } else {
            &self.default_login
        }
    }
}

impl Default for LoginRoutes {
    fn default() -> Self {
        Self {
            default_login: Cow::Borrowed("/login"),
            campo_login: Cow::Borrowed("/campo/login"),
        }
    }
}
