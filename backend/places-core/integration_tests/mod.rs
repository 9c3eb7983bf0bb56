mod location_service;
