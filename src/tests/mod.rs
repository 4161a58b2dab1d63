mod apply_tests;
