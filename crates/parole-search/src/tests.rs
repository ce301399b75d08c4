mod highlight_tests;
