use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "netstudy-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plot_contention"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run plot_contention")
}

fn contention_csv() -> String {
    let mut csv = String::from("node,tx_rate_kbps,mac_tx_drops,phy_rx_drops\n");
    for node in 0..2 {
        for step in 1..=5 {
            let rate = step * 100;
            csv.push_str(&format!("{node},{rate},{},{}\n", rate / 10 + node, rate / 20));
        }
    }
    csv
}

#[test]
fn plot_contention_writes_two_images() {
    let dir = unique_temp_dir("plot-ok");
    fs::write(dir.join("contention.csv"), contention_csv()).expect("write csv");

    let output = run_in(&dir, &[]);
    assert!(
        output.status.success(),
        "plot_contention failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    for name in ["mac_tx_drops.png", "phy_rx_drops.png"] {
        let bytes = fs::read(dir.join(name)).expect("read png");
        assert!(bytes.starts_with(b"\x89PNG"), "{name} is not a PNG");
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn plot_contention_missing_node_column_writes_nothing() {
    let dir = unique_temp_dir("plot-bad");
    fs::write(
        dir.join("contention.csv"),
        "tx_rate_kbps,mac_tx_drops,phy_rx_drops\n100,1,2\n200,3,4\n",
    )
    .expect("write csv");

    let output = run_in(&dir, &[]);
    assert!(!output.status.success(), "missing node column must fail");
    assert!(!dir.join("mac_tx_drops.png").exists());
    assert!(!dir.join("phy_rx_drops.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn plot_contention_honours_input_and_out_dir() {
    let dir = unique_temp_dir("plot-flags");
    fs::write(dir.join("run1.csv"), contention_csv()).expect("write csv");

    let output = run_in(
        &dir,
        &["--input", "run1.csv", "--out-dir", "figs", "--width", "400", "--height", "300"],
    );
    assert!(output.status.success());
    assert!(dir.join("figs").join("mac_tx_drops.png").exists());
    assert!(dir.join("figs").join("phy_rx_drops.png").exists());

    let _ = fs::remove_dir_all(&dir);
}
