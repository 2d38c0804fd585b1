mod jsonl_feedback_store_test;
