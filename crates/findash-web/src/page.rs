//! Embedded single-page frontend.
//!
//! The page owns all selection state. Every control change re-fetches the
//! affected chart endpoint(s) and replaces the chart in place via Plotly:
//! sector filter drives charts 1+2, the trend controls drive chart 3, the
//! slider drives chart 4.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Financial Data Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 { text-align: center; color: #333; margin-bottom: 20px; }
        .summary-row { display: flex; justify-content: center; gap: 40px; margin-bottom: 20px; }
        .top-text { font-size: 18px; font-weight: 600; color: #444; }
        .grid { display: flex; flex-wrap: wrap; gap: 20px; }
        .card {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            flex: 1 1 45%;
            min-width: 420px;
        }
        .card.wide { flex-basis: 100%; }
        .card h4 { margin: 0 0 10px; color: #333; }
        select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            font-size: 14px;
            margin-bottom: 10px;
        }
        .radio-row { margin-bottom: 10px; font-size: 14px; color: #555; }
        .radio-row label { margin-right: 15px; }
        input[type=range] { width: 100%; }
        .marks { display: flex; justify-content: space-between; font-size: 12px; color: #888; margin-bottom: 10px; }
        .chart { height: 380px; }
    </style>
</head>
<body>
    <h1>Financial Data Dashboard</h1>

    <div class="summary-row">
        <div class="top-text" id="total-records">Total Records: …</div>
        <div class="top-text" id="avg-price">Average Stock Price: …</div>
    </div>

    <div class="grid">
        <div class="card">
            <h4>Stock Price Distribution</h4>
            <select id="sector-filter"></select>
            <div id="price-distribution" class="chart"></div>
        </div>

        <div class="card">
            <h4>Stock Performance Comparison</h4>
            <div id="performance-comparison" class="chart"></div>
        </div>

        <div class="card wide">
            <h4>Portfolio Value Distribution</h4>
            <input type="range" id="value-slider" step="1000">
            <div class="marks" id="value-marks"></div>
            <div id="value-distribution" class="chart"></div>
        </div>

        <div class="card wide">
            <h4>Market Trends</h4>
            <div class="radio-row">
                <label><input type="radio" name="chart-type" value="line" checked> Line Chart</label>
                <label><input type="radio" name="chart-type" value="bar"> Bar Chart</label>
            </div>
            <select id="sector-trend-filter"></select>
            <div id="market-trends" class="chart"></div>
        </div>
    </div>

    <script>
        const HISTOGRAM_COLORS = ['#636EFA', '#EF553B', '#00CC96', '#AB63FA', '#FFA15A'];
        const SET2_COLORS = ['#66c2a5', '#fc8d62', '#8da0cb', '#e78ac3',
                             '#a6d854', '#ffd92f', '#e5c494', '#b3b3b3'];

        function fmtMoney(value) {
            return '$' + value.toLocaleString('en-US',
                { minimumFractionDigits: 2, maximumFractionDigits: 2 });
        }

        function binCenters(edges) {
            const centers = [];
            for (let i = 0; i + 1 < edges.length; i++) {
                centers.push((edges[i] + edges[i + 1]) / 2);
            }
            return centers;
        }

        function fillSectorSelect(select, sectors) {
            select.innerHTML = '<option value="">Select Sector</option>' +
                sectors.map(s => `<option value="${s}">${s}</option>`).join('');
        }

        function emptyChart(div, title) {
            Plotly.react(div, [], {
                title: title,
                annotations: [{
                    text: 'No data for this selection',
                    showarrow: false, font: { size: 16, color: '#888' }
                }],
                xaxis: { visible: false }, yaxis: { visible: false }
            });
        }

        async function fetchJson(url) {
            const response = await fetch(url);
            if (!response.ok) throw new Error(`${url}: ${response.status}`);
            return response.json();
        }

        async function updatePriceDistribution() {
            const sector = document.getElementById('sector-filter').value;
            const data = await fetchJson(`/api/price-distribution?sector=${encodeURIComponent(sector)}`);
            const div = document.getElementById('price-distribution');

            if (data.kind === 'empty') {
                emptyChart(div, 'Stock Price Distribution by Sector');
                return;
            }

            const centers = binCenters(data.edges);
            const traces = data.series.map(s => ({
                x: centers, y: s.counts, name: s.sector, type: 'bar'
            }));
            Plotly.react(div, traces, {
                title: 'Stock Price Distribution by Sector',
                barmode: 'stack',
                colorway: HISTOGRAM_COLORS,
                xaxis: { title: 'Stock Price' },
                yaxis: { title: 'Count' }
            });
        }

        async function updatePerformance() {
            const sector = document.getElementById('sector-filter').value;
            const data = await fetchJson(`/api/performance?sector=${encodeURIComponent(sector)}`);

            const bySector = new Map();
            for (const point of data.points) {
                if (!bySector.has(point.sector)) bySector.set(point.sector, { x: [], y: [] });
                const series = bySector.get(point.sector);
                series.x.push(point.company);
                series.y.push(point.stock_price);
            }
            const traces = [...bySector.entries()].map(([name, series]) => ({
                x: series.x, y: series.y, name: name, type: 'bar'
            }));
            Plotly.react(document.getElementById('performance-comparison'), traces, {
                title: 'Stock Performance Comparison',
                barmode: 'group',
                colorway: SET2_COLORS,
                xaxis: { title: 'Company' },
                yaxis: { title: 'Stock Price' }
            });
        }

        async function updateTrends() {
            const sector = document.getElementById('sector-trend-filter').value;
            const kind = document.querySelector('input[name="chart-type"]:checked').value;
            const data = await fetchJson(
                `/api/trends?sector=${encodeURIComponent(sector)}&kind=${kind}`);

            const trace = {
                x: data.points.map(p => p.period),
                y: data.points.map(p => p.count)
            };
            if (data.kind === 'line') {
                trace.type = 'scatter';
                trace.mode = 'lines+markers';
            } else {
                trace.type = 'bar';
            }
            Plotly.react(document.getElementById('market-trends'), [trace], {
                title: 'Market Trends Over Time',
                xaxis: { title: 'Month', type: 'category' },
                yaxis: { title: 'Count' }
            });
        }

        async function updateValueDistribution() {
            const threshold = document.getElementById('value-slider').value;
            const data = await fetchJson(`/api/value-distribution?max_value=${threshold}`);
            const div = document.getElementById('value-distribution');

            if (data.edges.length === 0) {
                emptyChart(div, 'Portfolio Value Distribution');
                return;
            }
            Plotly.react(div, [{
                x: binCenters(data.edges), y: data.counts, type: 'bar'
            }], {
                title: 'Portfolio Value Distribution',
                colorway: HISTOGRAM_COLORS,
                xaxis: { title: 'Portfolio Value' },
                yaxis: { title: 'Count' }
            });
        }

        async function init() {
            const meta = await fetchJson('/api/meta');

            document.getElementById('total-records').textContent =
                `Total Records: ${meta.summary.total_records}`;
            const avg = meta.summary.average_stock_price;
            document.getElementById('avg-price').textContent =
                `Average Stock Price: ${avg === null ? '—' : fmtMoney(avg)}`;

            fillSectorSelect(document.getElementById('sector-filter'), meta.sectors);
            fillSectorSelect(document.getElementById('sector-trend-filter'), meta.sectors);

            const slider = document.getElementById('value-slider');
            if (meta.slider) {
                slider.min = meta.slider.min;
                slider.max = meta.slider.max;
                slider.value = meta.slider.max;
                document.getElementById('value-marks').innerHTML = meta.slider.marks
                    .map(m => `<span>$${Math.round(m).toLocaleString('en-US')}</span>`)
                    .join('');
            } else {
                slider.disabled = true;
            }

            await Promise.all([
                updatePriceDistribution(),
                updatePerformance(),
                updateTrends(),
                updateValueDistribution()
            ]);
        }

        document.getElementById('sector-filter').addEventListener('change', () => {
            updatePriceDistribution();
            updatePerformance();
        });
        document.getElementById('sector-trend-filter').addEventListener('change', updateTrends);
        document.querySelectorAll('input[name="chart-type"]')
            .forEach(radio => radio.addEventListener('change', updateTrends));
        document.getElementById('value-slider').addEventListener('change', updateValueDistribution);

        init();
    </script>
</body>
</html>
"##;
