//! Tests for the serialized configuration shape.

use rinki_config::{BuildConfiguration, ConfigResolver, Mode, ProjectLayout, ProjectSettings};
use serde_json::{Value, json};

fn resolve_value(mode: Mode) -> Value {
    ConfigResolver::new(mode, ProjectLayout::new("/app"), ProjectSettings::default())
        .resolve()
        .to_value()
        .expect("serialize configuration")
}

#[test]
fn top_level_uses_bundler_field_names() {
    let value = resolve_value(Mode::Development);
    let object = value.as_object().expect("object");

    for key in [
        "context",
        "mode",
        "entry",
        "output",
        "resolve",
        "optimization",
        "devServer",
        "devtool",
        "plugins",
        "module",
    ] {
        assert!(object.contains_key(key), "missing `{key}`");
    }
}

#[test]
fn development_shape() {
    let value = resolve_value(Mode::Development);

    assert_eq!(value["mode"], json!("development"));
    assert_eq!(value["devtool"], json!("source-map"));
    assert_eq!(value["devServer"], json!({ "port": 4500, "hot": true }));
    assert_eq!(value["optimization"], json!({ "splitChunks": { "chunks": "all" } }));
    assert_eq!(value["output"]["filename"], json!("[name].js"));
}

#[test]
fn production_shape() {
    let value = resolve_value(Mode::Production);

    assert_eq!(value["mode"], json!("production"));
    assert_eq!(value["devtool"], json!(""));
    assert_eq!(value["devServer"]["hot"], json!(false));
    assert_eq!(
        value["optimization"]["minimizer"],
        json!([
            { "plugin": "css-minimizer-webpack-plugin" },
            { "plugin": "terser-webpack-plugin" }
        ])
    );
}

#[test]
fn plugins_serialize_in_order() {
    let value = resolve_value(Mode::Production);

    assert_eq!(
        value["plugins"],
        json!([
            {
                "plugin": "html-webpack-plugin",
                "options": {
                    "template": "../public/index.html",
                    "minify": { "collapseWhitespace": true }
                }
            },
            { "plugin": "clean-webpack-plugin" },
            {
                "plugin": "copy-webpack-plugin",
                "options": {
                    "patterns": [{ "from": "/app/src/favicon.ico", "to": "/app/build" }]
                }
            },
            {
                "plugin": "mini-css-extract-plugin",
                "options": { "filename": "[name].[hash].css" }
            }
        ])
    );
}

#[test]
fn script_rule_shape() {
    let value = resolve_value(Mode::Development);

    assert_eq!(
        value["module"]["rules"][5],
        json!({
            "test": r"\.ts(x?)$",
            "exclude": "node_modules",
            "use": [{
                "loader": "babel-loader",
                "options": { "presets": ["@babel/preset-env", "@babel/preset-typescript"] }
            }]
        })
    );
    assert_eq!(
        value["module"]["rules"][1]["use"],
        json!(["mini-css-extract-plugin/loader", "css-loader", "sass-loader"])
    );
}

#[test]
fn alias_order_is_preserved_in_json() {
    let json = ConfigResolver::new(
        Mode::Development,
        ProjectLayout::new("/app"),
        ProjectSettings::default(),
    )
    .resolve()
    .to_json()
    .expect("serialize");

    let components = json.find("\"@components\"").expect("@components");
    let root = json.find("\"!\"").expect("!");
    assert!(components < root);
}

#[test]
fn configuration_deserializes_back() {
    let config = ConfigResolver::new(
        Mode::Production,
        ProjectLayout::new("/app"),
        ProjectSettings::default(),
    )
    .resolve();

    let text = config.to_json_pretty().expect("serialize");
    let parsed: BuildConfiguration = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(parsed, config);
}
