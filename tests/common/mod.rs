#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub template: PathBuf,
}

impl TestEnv {
    /// Environment with the fully solved fixture template.
    pub fn new() -> Self {
        Self::with_template(&passing_template())
    }

    pub fn with_template(html: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let template = tmp.path().join("starter-template.html");
        fs::write(&template, html).expect("write fixture template");
        Self {
            _tmp: tmp,
            template,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rwdlab").expect("binary under test");
        cmd.arg("--template")
            .arg(self.template.to_str().expect("template path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let out = self.cmd().args(args).output().expect("run binary");
        String::from_utf8(out.stdout).expect("utf8 stdout")
    }
}

/// A template that satisfies every check of every challenge.
pub fn passing_template() -> String {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Responsive Design Lab</title>
</head>
<body class="bg-gray-100">
  <section id="challenge-1" class="p-4">
    <h2 class="text-xl font-bold">Challenge 1: The Responsive Card</h2>
    <div class="bg-white rounded-lg shadow-md p-4 md:flex lg:hover:shadow-lg">
      <img src="product.jpg" alt="Product photo" class="w-full md:w-32 md:h-32 rounded">
      <div class="mt-4 md:mt-0 md:ml-4">
        <h3 class="text-lg font-semibold md:text-xl">Wireless Headphones</h3>
        <p class="text-gray-600">Premium sound without the wires.</p>
        <button class="w-full md:w-auto mt-2 bg-blue-600 text-white px-4 py-2 rounded">Add to cart</button>
      </div>
    </div>
  </section>

  <section id="challenge-2" class="p-4">
    <h2 class="text-xl font-bold">Challenge 2: The Adaptive Navigation</h2>
    <nav class="bg-gray-800 p-4 rounded">
      <div class="flex items-center justify-between">
        <span class="text-white font-bold">Lab Site</span>
        <button class="text-white md:hidden">Menu</button>
      </div>
      <ul class="mt-4 space-y-2 md:mt-0 md:space-y-0 md:flex md:items-center md:space-x-6">
        <li><a href="#" class="block py-2 text-gray-300">Home</a></li>
        <li><a href="#" class="block py-2 text-gray-300">Products</a></li>
        <li><a href="#" class="block py-2 text-gray-300">About</a></li>
        <li><a href="#" class="block py-2 text-gray-300">Contact</a></li>
      </ul>
      <div class="hidden lg:block text-gray-300">Welcome back, learner</div>
    </nav>
  </section>

  <section id="challenge-3" class="p-4">
    <h2 class="text-xl font-bold">Challenge 3: The Content Choreographer</h2>
    <div class="bg-white rounded-lg shadow-md p-4">
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
        <div id="c3-main-content" class="bg-blue-50 p-4 md:col-span-2">
          <h3 class="font-semibold">Main Dashboard</h3>
          <div id="c3-stats" class="mt-4 space-y-2 md:flex md:space-x-4 md:space-y-0">
            <div>Users: 1280</div>
            <div>Sales: 430</div>
          </div>
        </div>
        <div id="c3-secondary-content" class="bg-green-50 p-4 hidden md:block">Secondary analytics</div>
        <div id="c3-tertiary-content" class="bg-purple-50 p-4 hidden lg:block">Tertiary reports</div>
        <div id="c3-sidebar" class="bg-gray-50 p-4 hidden lg:block">Sidebar tools</div>
      </div>
    </div>
  </section>
</body>
</html>
"##
    .to_string()
}

/// The passing template with one exact substring swapped, for targeted
/// single-token mutations.
pub fn template_with(from: &str, to: &str) -> String {
    let html = passing_template();
    assert!(html.contains(from), "fixture does not contain `{from}`");
    html.replace(from, to)
}
