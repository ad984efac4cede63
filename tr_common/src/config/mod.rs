use std::{fs, path::Path, sync::Arc};

pub use toml::{value::Table, Value};

mod types;

/// A toml config. This is a primary document, which is loaded from disk, and a
/// default document, which is compiled into the binary. Any key missing from
/// the primary document is read from the default one.
pub struct Config {
  primary: Value,
  default: Value,
}

pub struct ConfigSection {
  config: Arc<Config>,
  path:   Vec<String>,
}

pub trait TomlValue<'a> {
  /// If this current type matches the toml value, this returns Some(v).
  fn from_toml(v: &'a Value) -> Option<Self>
  where
    Self: Sized;

  /// Returns the name of this toml value (string, integer, etc).
  fn name() -> String
  where
    Self: Sized;
}

/// A toml key. This is how a path to a toml value can be specified. This can be
/// represented as either an array or a string. If it is a string, it will be
/// split by dots into an array.
///
/// In order to index into tables, simply use a string name for a section. To
/// index into an array, use a number in the array. Example:
///
/// ```ignore
/// foo = "bar"
/// items = [3, 4]
///
/// [hello]
/// name = "world"
/// ```
///
/// These are valid indices:
/// ```ignore
/// foo         // points to 'bar'
/// hello.name  // points to 'world'
/// items.1     // points to 4
/// ```
pub trait TomlKey {
  /// Returns the sections of this key.
  fn sections(&self) -> Vec<&str>;
}

impl TomlKey for str {
  fn sections(&self) -> Vec<&str> { self.split('.').collect() }
}
impl TomlKey for [&str] {
  fn sections(&self) -> Vec<&str> { self.to_vec() }
}

impl Config {
  /// Creates a new config for the given path. The path is a runtime path to
  /// load the config file. The default is toml source, which should be
  /// compiled into the binary. The default is used whenever a key is not
  /// present in the main config.
  ///
  /// If the file cannot be read or parsed, an error is logged, and every key
  /// will come from the default.
  pub fn new(path: impl AsRef<Path>, default_src: &str) -> Self {
    Config { primary: Self::load_toml(path.as_ref()), default: Self::load_toml_src(default_src) }
  }
  /// Creates a new config from the given source. This is mostly used in tests.
  pub fn new_src(src: &str, default_src: &str) -> Self {
    Config { primary: Self::load_toml_src(src), default: Self::load_toml_src(default_src) }
  }

  fn load_toml(path: &Path) -> Value {
    match fs::read_to_string(path) {
      Ok(src) => Self::load_toml_src(&src),
      Err(e) => {
        error!("error loading toml at `{}`: {}", path.display(), e);
        Value::Table(Default::default())
      }
    }
  }
  fn load_toml_src(src: &str) -> Value {
    src.parse::<Value>().unwrap_or_else(|e| {
      error!("error loading toml: {}", e);
      Value::Table(Default::default())
    })
  }

  /// Reads the toml value at the given key. This will always return a value.
  /// If the value doesn't exist in the primary config (or the value is the
  /// wrong type), then it will use the default config. If it doesn't exist
  /// there (or if it's the wrong type), this function will panic.
  ///
  /// See [`TomlKey`] for details on how that is parsed.
  ///
  /// A key should always exist when you try to load it. All the keys that can
  /// be loaded should be present in the default config, so that it is easy for
  /// users to find and edit them.
  pub fn get<'a, K: ?Sized, T>(&'a self, key: &K) -> T
  where
    K: TomlKey,
    T: TomlValue<'a>,
  {
    let sections = key.sections();
    match Self::get_val(&self.primary, &sections) {
      Some(val) => match T::from_toml(val) {
        Some(v) => v,
        None => {
          warn!("unexpected value at `{}`: {}, expected a {}", sections.join("."), val, T::name());
          self.get_default(&sections)
        }
      },
      None => self.get_default(&sections),
    }
  }

  /// Gets the default value at the given key. This will panic if the key does
  /// not exist, or if it was the wrong type.
  fn get_default<'a, T>(&'a self, sections: &[&str]) -> T
  where
    T: TomlValue<'a>,
  {
    let val = Self::get_val(&self.default, sections);
    match val.and_then(T::from_toml) {
      Some(v) => v,
      None => {
        panic!(
          "default had wrong type for key `{}`: {:?}, expected a {}",
          sections.join("."),
          val,
          T::name(),
        );
      }
    }
  }

  fn get_val<'a>(toml: &'a Value, sections: &[&str]) -> Option<&'a Value> {
    let mut val = toml;
    for s in sections {
      val = match val {
        Value::Table(map) => map.get(*s)?,
        Value::Array(arr) => arr.get(s.parse::<usize>().ok()?)?,
        _ => return None,
      };
    }
    Some(val)
  }

  /// Returns a config section for the given key.
  pub fn section<K: ?Sized>(self: &Arc<Self>, key: &K) -> ConfigSection
  where
    K: TomlKey,
  {
    ConfigSection {
      config: self.clone(),
      path:   key.sections().iter().map(|v| v.to_string()).collect(),
    }
  }
}

impl ConfigSection {
  /// Gets the config value at the given key, prefixed by this section's path.
  pub fn get<'a, K: ?Sized, T>(&'a self, key: &K) -> T
  where
    K: TomlKey,
    T: TomlValue<'a>,
  {
    let mut path: Vec<_> = self.path.iter().map(|s| s.as_str()).collect();
    path.extend(key.sections());
    self.config.get(path.as_slice())
  }
}
