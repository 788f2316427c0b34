// VSynth - Synthetic vSphere Inventory Generator
//
// Copyright (c) 2025 VSynth contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn vsynth_cmd() -> Command {
    Command::cargo_bin("vsynth").expect("Failed to find vsynth binary")
}

const CONFIG: &str = r#"
scale:
  size: tiny
  sizes:
    tiny:
      total_vms: 40
      avg_vms_per_host: 20
      max_hosts_per_cluster: 2

regions:
  HQ-A:
    weight: 0.5
    network_prefix: "10.10"
    headquarters: true
    cluster_sizes: default
  NA:
    weight: 0.5
    network_prefix: "10.20"
    cluster_sizes: default

clusters:
  size_distributions:
    default:
      - { category: small, weight: 1.0, min_hosts: 1, max_hosts: 2 }

hosts:
  models:
    - { name: PowerEdge R750, vendor: Dell, weight: 1.0, cpu_cores: 48, memory_gb: 384, nic_count: 2 }
  vm_density:
    small: { min: 1, max: 2 }

virtual_machines:
  os_types:
    - { name: Ubuntu 20.04 LTS, weight: 1.0, cpu_choices: [2, 4], memory_gb_choices: [4, 8] }
  purposes:
    - { name: WEB, weight: 0.5 }
    - { name: DB, weight: 0.5 }

storage:
  datastore_sizes_gb: [2048]
  arrays:
    - { name: PowerStore, model: PowerStore T1000, weight: 1.0 }
"#;

const ARTIFACTS: &[&str] = &[
    "vCenters",
    "Datacenters",
    "Clusters",
    "ESXiHosts",
    "VirtualMachines",
    "VMGuestDetails",
    "Datastores",
    "DatastoreClusters",
    "VirtualSwitches",
    "Networks",
    "PortGroups",
    "NSXTags",
    "HostNICs",
];

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, CONFIG).expect("Failed to write config");
    path
}

// ===== Help and version =====

#[test]
fn help_output() {
    vsynth_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "VSynth - synthetic vSphere inventory generator",
        ))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_output() {
    vsynth_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vsynth"));
}

// ===== validate =====

#[test]
fn validate_reports_derived_counts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    vsynth_cmd()
        .args(["validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size profile: tiny"))
        .stdout(predicate::str::contains("HQ-A"))
        .stdout(predicate::str::contains("(HQ)"));
}

#[test]
fn validate_rejects_missing_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, CONFIG.replace("storage:", "storage_x:")).unwrap();
    vsynth_cmd()
        .args(["validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required section 'storage'"));
}

#[test]
fn validate_rejects_bad_weights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, CONFIG.replace("weight: 0.5\n    network_prefix: \"10.10\"", "weight: 0.4\n    network_prefix: \"10.10\"")).unwrap();
    vsynth_cmd()
        .args(["validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("weights in 'regions'"));
}

#[test]
fn validate_rejects_missing_file() {
    vsynth_cmd()
        .args(["validate", "--config", "/no/such/config.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ===== generate =====

#[test]
fn generate_writes_all_csv_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let output = dir.path().join("vsphere-data");

    vsynth_cmd()
        .args(["generate", "--seed", "42", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("vCenters.csv"))
        .stdout(predicate::str::contains("Done:"));

    for artifact in ARTIFACTS {
        let path = output.join(format!("{artifact}.csv"));
        assert!(path.is_file(), "missing artifact {artifact}.csv");
    }

    let vcenters = fs::read_to_string(output.join("vCenters.csv")).unwrap();
    let mut lines = vcenters.lines();
    assert_eq!(
        lines.next(),
        Some("name,moref,version,build,url,description")
    );
    // Two regions, one vCenter each.
    assert_eq!(lines.count(), 2);
}

#[test]
fn generate_replaces_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let output = dir.path().join("vsphere-data");
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("stale.csv"), "left over").unwrap();

    vsynth_cmd()
        .args(["generate", "--seed", "1", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(!output.join("stale.csv").exists(), "stale file survived");
    assert!(output.join("vCenters.csv").is_file());
}

#[test]
fn generate_writes_parquet_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let output = dir.path().join("vsphere-data");

    vsynth_cmd()
        .args(["generate", "--seed", "7", "--format", "parquet", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    for artifact in ARTIFACTS {
        assert!(
            output.join(format!("{artifact}.parquet")).is_file(),
            "missing artifact {artifact}.parquet"
        );
    }
}

#[test]
fn generate_is_reproducible_with_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");

    for output in [&out_a, &out_b] {
        vsynth_cmd()
            .args(["generate", "--seed", "99", "--config"])
            .arg(&config)
            .arg("--output")
            .arg(output)
            .assert()
            .success();
    }

    // vCenter and datacenter identifiers stay UUID-derived, so compare an
    // artifact whose cells come entirely from the seeded source.
    let a = fs::read_to_string(out_a.join("HostNICs.csv")).unwrap();
    let b = fs::read_to_string(out_b.join("HostNICs.csv")).unwrap();
    assert_eq!(a, b);

    let vms_a = fs::read_to_string(out_a.join("VirtualMachines.csv")).unwrap();
    let vms_b = fs::read_to_string(out_b.join("VirtualMachines.csv")).unwrap();
    assert_eq!(vms_a.lines().count(), vms_b.lines().count());
}

#[test]
fn generate_fails_cleanly_on_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, CONFIG.replace("size: tiny", "size: enormous")).unwrap();
    let output = dir.path().join("vsphere-data");

    vsynth_cmd()
        .args(["generate", "--config"])
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid size key 'enormous'"));

    assert!(!output.exists(), "output created despite config error");
}

// ===== sales =====

#[test]
fn sales_writes_single_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("sample_customer_sales.parquet");

    vsynth_cmd()
        .args(["sales", "--seed", "5", "--records", "25", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("25 records"));

    assert!(target.is_file());
}

#[test]
fn sales_supports_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("sales.csv");

    vsynth_cmd()
        .args(["sales", "--seed", "5", "--records", "10", "--format", "csv", "--output"])
        .arg(&target)
        .assert()
        .success();

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.starts_with(
        "customer_id,transaction_date,product_category,sales_amount,quantity,is_repeat_customer"
    ));
    assert_eq!(content.lines().count(), 11);
}
