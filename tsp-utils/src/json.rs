use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_string_pretty, to_value, Map, Value};
use std::{fs, io::Read};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serialises `obj` with object keys sorted at every depth.
pub fn jsonify<T>(obj: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(to_string(&jsonify_internal(&to_value(obj)?))?)
}

pub fn jsonify_pretty<T>(obj: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(to_string_pretty(&jsonify_internal(&to_value(obj)?))?)
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(items) => Value::Array(items.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Resolves a command line argument that is either inline json, a path to a
/// `.json` file, or `-` for stdin.
pub fn read_json_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read json from stdin: {}", e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read json file {}: {}", arg, e))
    } else {
        Ok(arg.to_string())
    }
}

pub fn load_json_arg<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = read_json_arg(arg)?;
    dejsonify::<T>(&json_str).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
