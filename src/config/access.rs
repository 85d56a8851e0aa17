use super::*;

impl LpmlConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// Automatically handles both `snake_case` and `kebab-case` key names, and
    /// numeric segments index into sequences.
    ///
    /// # Examples
    /// ```no_run
    /// # use lpml::LpmlConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = LpmlConfig::from_file("player.lpml")?;
    /// let name: String = config.get("player.name")?;
    /// let hp: u32 = config.get("player.stats.hp")?;
    /// let first_item: String = config.get("player.items.0")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, LpmlError>
    where
        T: TryFrom<Value, Error = LpmlError>,
    {
        let value = self.get_value_flexible(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, LpmlError>
    where
        T: TryFrom<Value, Error = LpmlError>,
    {
        match self.get_value_flexible(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(LpmlError::PathError { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use lpml::LpmlConfig;
    /// # let config = LpmlConfig::from_file("player.lpml").unwrap();
    /// let regen = config.get_or("player.regen", 1u32);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = LpmlError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Internal method that tries both snake_case and kebab-case variants.
    fn get_value_flexible(&self, path: &str) -> Result<Value, LpmlError> {
        if let Ok(v) = self.get_value(path) {
            return Ok(v);
        }

        if path.trim().is_empty() {
            return self.get_value(path);
        }

        let segs: Vec<&str> = path.split('.').collect();

        fn variants(seg: &str) -> Vec<String> {
            let mut out = vec![seg.to_string(), seg.replace('-', "_"), seg.replace('_', "-")];
            out.sort();
            out.dedup();
            out
        }

        // DFS over combinations, stop on first that resolves
        fn dfs(cfg: &LpmlConfig, segs: &[&str], i: usize, cur: &mut Vec<String>) -> Option<Value> {
            if i == segs.len() {
                return cfg.get_value(&cur.join(".")).ok();
            }

            for v in variants(segs[i]) {
                cur.push(v);
                if let Some(val) = dfs(cfg, segs, i + 1, cur) {
                    return Some(val);
                }
                cur.pop();
            }
            None
        }

        dfs(self, &segs, 0, &mut Vec::new()).ok_or_else(|| LpmlError::PathError {
            message: "Path not found in configuration".into(),
            path: path.to_string(),
            hint: Some("Check that the path exists in your config file".into()),
        })
    }

    /// Get a raw `Value` at an exact path. An empty path returns the root.
    pub fn get_value(&self, path: &str) -> Result<Value, LpmlError> {
        helpers::lookup(&self.root, path).cloned().ok_or_else(|| {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            LpmlError::PathError {
                message: if line > 0 {
                    format!("Path found on line {} but could not be resolved", line)
                } else {
                    "Path not found in configuration".into()
                },
                path: path.to_string(),
                hint: if line > 0 {
                    Some(format!("Check the value at: {}", snippet))
                } else {
                    Some("Check that the path exists in your config file".into())
                },
            }
        })
    }

    /// Get all keys of the mapping at a given path, in source order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, LpmlError> {
        match self.get_value_flexible(path)? {
            Value::Mapping(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(LpmlError::TypeError {
                message: format!("Path '{}' is a {}, not a mapping", path, other.kind()),
                line: 0,
                hint: Some("Only mappings have keys".into()),
                code: Some(406),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value_flexible(path).is_ok()
    }
}

/// Enhance type/validation errors with line number information from config file.
pub(super) fn enhance_error_with_line_info(e: LpmlError, path: &str, raw_content: &str) -> LpmlError {
    match e {
        LpmlError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                LpmlError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                LpmlError::TypeError { message, line: 0, hint, code }
            }
        }
        LpmlError::ValidationError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                LpmlError::ValidationError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                LpmlError::ValidationError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
