mod feedback_payload_test;
