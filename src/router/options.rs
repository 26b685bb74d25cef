use regex::Regex;
use thiserror::Error;

use crate::types::{ParamMapper, ParamMappers};

pub const DEFAULT_PLACEHOLDER_PATTERN: &str = "[^/]+";
pub const DEFAULT_NOT_FOUND_PATH: &str = "/notfound";
pub const DEFAULT_NOT_FOUND_PAGE: &str = "404";

#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub params: ParamMappers,
    pub placeholder_pattern: String,
    pub not_found_path: String,
    pub not_found_page: String,
    pub debug: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            params: ParamMappers::new(),
            placeholder_pattern: DEFAULT_PLACEHOLDER_PATTERN.to_string(),
            not_found_path: DEFAULT_NOT_FOUND_PATH.to_string(),
            not_found_page: DEFAULT_NOT_FOUND_PAGE.to_string(),
            debug: false,
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.placeholder_pattern.trim().is_empty() {
            return Err(RouterConfigError::EmptyPlaceholderPattern);
        }
        let compiled = Regex::new(&self.placeholder_pattern).map_err(|source| {
            RouterConfigError::PlaceholderPatternInvalid {
                pattern: self.placeholder_pattern.clone(),
                reason: source.to_string(),
            }
        })?;
        if compiled.captures_len() > 1 {
            return Err(RouterConfigError::PlaceholderPatternCaptures {
                pattern: self.placeholder_pattern.clone(),
                groups: compiled.captures_len() - 1,
            });
        }
        if self.not_found_path.trim().is_empty() {
            return Err(RouterConfigError::EmptyNotFoundPath);
        }
        if self.not_found_page.trim().is_empty() {
            return Err(RouterConfigError::EmptyNotFoundPage);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn param<S: Into<String>>(mut self, name: S, mapper: ParamMapper) -> Self {
        self.config.params.insert(name.into(), mapper);
        self
    }

    pub fn params(mut self, params: ParamMappers) -> Self {
        self.config.params = params;
        self
    }

    pub fn placeholder_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.config.placeholder_pattern = pattern.into();
        self
    }

    pub fn not_found_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.not_found_path = path.into();
        self
    }

    pub fn not_found_page<S: Into<String>>(mut self, page: S) -> Self {
        self.config.not_found_page = page.into();
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.config.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("placeholder pattern cannot be empty")]
    EmptyPlaceholderPattern,
    #[error("placeholder pattern '{pattern}' is not a valid regex: {reason}")]
    PlaceholderPatternInvalid { pattern: String, reason: String },
    #[error("placeholder pattern '{pattern}' declares {groups} capture group(s); use (?:...) instead")]
    PlaceholderPatternCaptures { pattern: String, groups: usize },
    #[error("not-found path cannot be empty")]
    EmptyNotFoundPath,
    #[error("not-found page cannot be empty")]
    EmptyNotFoundPage,
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
