mod tests_capture;
