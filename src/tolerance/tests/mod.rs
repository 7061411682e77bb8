mod tests_symmetry;
