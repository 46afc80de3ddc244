mod tests_files;
mod tests_invariants;
mod tests_scenarios;
