mod docs_tests;
