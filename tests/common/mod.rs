use assert_cmd::Command;

pub fn zotmeta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("zotmeta").unwrap();
    cmd.env_remove("ZOTMETA_KEY");
    cmd.env_remove("ZOTMETA_LIBRARY_ID");
    cmd.env_remove("ZOTMETA_LIBRARY_TYPE");
    cmd.env_remove("ZOTMETA_API_BASE");
    // Point at a path that never exists so a developer's real config file
    // cannot leak into the tests
    cmd.env("ZOTMETA_CONFIG", "/nonexistent/zotmeta-config.toml");
    cmd
}
