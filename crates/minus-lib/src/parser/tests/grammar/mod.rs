mod expressions_tests;
